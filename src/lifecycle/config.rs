//! Startup configuration read from the environment.

use crate::checkout::PricingMode;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5050;
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable not set: {0}")]
    MissingVar(&'static str),

    #[error("invalid value {value:?} for {name}: {message}")]
    InvalidVar {
        name: &'static str,
        value: String,
        message: String,
    },
}

/// One address per collaborator, in `scheme://host:port` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaboratorAddrs {
    pub cart: String,
    pub product_catalog: String,
    pub currency: String,
    pub shipping: String,
    pub payment: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub addrs: CollaboratorAddrs,
    pub connect_timeout: Duration,
    pub pricing: PricingMode,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &'static str| lookup(name).filter(|v| !v.trim().is_empty());
        let addr = |name: &'static str| {
            var(name)
                .map(|v| with_scheme(v.trim()))
                .ok_or(ConfigError::MissingVar(name))
        };

        let port = match var("PORT") {
            Some(v) => parse("PORT", &v)?,
            None => DEFAULT_PORT,
        };
        let connect_timeout = match var("CHECKOUT_CONNECT_TIMEOUT_MS") {
            Some(v) => Duration::from_millis(parse("CHECKOUT_CONNECT_TIMEOUT_MS", &v)?),
            None => DEFAULT_CONNECT_TIMEOUT,
        };
        let concurrent = match var("CHECKOUT_CONCURRENT_PRICING") {
            Some(v) => parse::<bool>("CHECKOUT_CONCURRENT_PRICING", &v)?,
            None => false,
        };
        let pricing = if concurrent {
            PricingMode::Concurrent
        } else {
            PricingMode::Sequential
        };

        Ok(Self {
            port,
            addrs: CollaboratorAddrs {
                cart: addr("CART_SERVICE_ADDR")?,
                product_catalog: addr("PRODUCT_CATALOG_SERVICE_ADDR")?,
                currency: addr("CURRENCY_SERVICE_ADDR")?,
                shipping: addr("SHIPPING_SERVICE_ADDR")?,
                payment: addr("PAYMENT_SERVICE_ADDR")?,
                email: addr("EMAIL_SERVICE_ADDR")?,
            },
            connect_timeout,
            pricing,
        })
    }
}

fn parse<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidVar {
            name,
            value: value.to_string(),
            message: e.to_string(),
        })
}

fn with_scheme(addr: &str) -> String {
    if addr.contains("://") {
        addr.to_string()
    } else {
        format!("http://{addr}")
    }
}
