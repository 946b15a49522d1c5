use interfaces::connector_types::BoxedConnector;

use crate::connectors;

/// Connector instance shared by every flow of a client.
#[derive(Clone)]
pub struct ConnectorData {
    pub connector: BoxedConnector,
    pub connector_name: &'static str,
}

impl ConnectorData {
    pub fn paymaya() -> Self {
        let connector: BoxedConnector = Box::new(connectors::Paymaya::new());
        Self {
            connector_name: connector.id(),
            connector,
        }
    }
}

impl std::fmt::Debug for ConnectorData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectorData")
            .field("connector_name", &self.connector_name)
            .finish()
    }
}
