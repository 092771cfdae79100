pub mod console;
pub mod events;
pub mod factory;
pub mod log;
pub mod memory;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GatewayPublisherVia {
    Console,
    Log,
    Memory,
}

