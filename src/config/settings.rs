use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
    pub bind_address: IpAddr,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

/// Defaults and upper bounds for query parameters
#[derive(Debug, Clone)]
pub struct QuerySettings {
    pub default_top_n: usize,
    pub max_top_n: usize,
    pub default_range: usize,
    pub max_range: usize,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            default_top_n: 10,
            max_top_n: 1000,
            default_range: 5,
            max_range: 1000,
        }
    }
}

impl QuerySettings {
    pub fn top_n(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_top_n).min(self.max_top_n)
    }

    pub fn range(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_range).min(self.max_range)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub query: QuerySettings,
    pub seed_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server: ServerSettings::default(),
            query: QuerySettings::default(),
            seed_path: std::env::var("LEADERBOARD_SEED").ok(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }
}
