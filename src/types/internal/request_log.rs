/// Request audit record as captured by the request logger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLogEntry {
    pub method: String,
    pub endpoint: String,
    pub status_code: u16,
    pub client_ip: Option<String>,
    pub proxy_ip: Option<String>,
}

impl RequestLogEntry {
    pub fn new(method: impl Into<String>, endpoint: impl Into<String>, status_code: u16) -> Self {
        Self {
            method: method.into(),
            endpoint: endpoint.into(),
            status_code,
            client_ip: None,
            proxy_ip: None,
        }
    }

    pub fn with_client_ip(mut self, client_ip: Option<String>) -> Self {
        self.client_ip = client_ip;
        self
    }

    pub fn with_proxy_ip(mut self, proxy_ip: Option<String>) -> Self {
        self.proxy_ip = proxy_ip;
        self
    }
}
