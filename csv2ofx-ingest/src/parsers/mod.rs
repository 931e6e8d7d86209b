pub mod busey;
