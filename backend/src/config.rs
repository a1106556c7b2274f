use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::error::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "frontend/dist";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Trunk output directory holding index.html and the hashed bundles.
    pub dist_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let host = lookup("PORTFOLIO_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host
            .parse::<IpAddr>()
            .map_err(|_| Error::Config(format!("PORTFOLIO_HOST is not an IP address: {}", host)))?;

        let port = match lookup("PORTFOLIO_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("PORTFOLIO_PORT is not a valid port: {}", raw)))?,
            None => DEFAULT_PORT,
        };

        let dist_dir = lookup("PORTFOLIO_DIST_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));

        Ok(Self { host, port, dist_dir })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.index_path(), PathBuf::from("frontend/dist/index.html"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORTFOLIO_HOST", "0.0.0.0"),
            ("PORTFOLIO_PORT", " 3000 "),
            ("PORTFOLIO_DIST_DIR", "/srv/site"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.dist_dir, PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_rejects_bad_port() {
        let result = Config::from_lookup(lookup(&[("PORTFOLIO_PORT", "eighty")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_bad_host() {
        let result = Config::from_lookup(lookup(&[("PORTFOLIO_HOST", "localhost:80")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
