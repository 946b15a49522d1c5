pub mod connector_flow;
pub mod errors;
pub mod flow_result;
pub mod redirect;
pub mod router_data;
pub mod router_request_types;
pub mod router_response_types;
pub mod types;
