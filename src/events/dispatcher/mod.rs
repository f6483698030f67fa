pub mod event_dispatcher;
pub mod errors;

pub use event_dispatcher::EventDispatcher;
pub use errors::DispatchError;
