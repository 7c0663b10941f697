pub mod config;
pub mod forwarder;
pub mod orchestrator;
pub mod reference;
pub mod refresher;
pub mod request;
pub mod scheduler;
pub mod server;
pub mod validator;
