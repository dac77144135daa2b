pub mod flash_cookie;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
