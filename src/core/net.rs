// src/core/net.rs

// Blocking HTTPS GET; one shared client for the whole run.

use std::{error::Error, sync::OnceLock, time::Duration};

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;

static CLIENT: OnceLock<Client> = OnceLock::new();

fn client() -> &'static Client {
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(15))
            .build()
            .expect("default TLS backend available")
    })
}

pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    let resp = client().get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.text()?)
}
