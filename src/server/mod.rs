pub mod http_server;
pub mod request;
pub mod response;
pub mod service;

pub use http_server::{shutdown_signal, HttpServer};
pub use request::{build_incoming, parse_query_params};
pub use response::{health_response, HttpResponse};
pub use service::GatewayService;
