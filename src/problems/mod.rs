pub mod watermelon;
