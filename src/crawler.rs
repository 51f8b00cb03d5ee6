use crate::logger::{Logger, Logging};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use flate2::read::GzDecoder;
#[cfg(test)]
use mockall::automock;
use reqwest::StatusCode;
use std::io::Read;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Fetching {
    async fn fetch_body(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct Crawler<'a> {
    cookie: String,
    logger: &'a Logger,
}

impl<'a> Crawler<'a> {
    pub fn new(cookie: &str, logger: &'a Logger) -> Self {
        Crawler {
            cookie: String::from(cookie),
            logger,
        }
    }
}

#[async_trait]
impl<'a> Fetching for Crawler<'a> {
    async fn fetch_body(&self, url: &str) -> Result<Vec<u8>> {
        let mut request = reqwest::Client::new().get(url)
            .header("user-agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/98.0.4758.80 Safari/537.36")
            .header("referer", "https://s.weibo.com");
        if self.cookie != "" {
            request = request.header("cookie", self.cookie.clone());
        }
        let response = request.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow!("non 200 status: '{url}': {status}"));
        }
        self.logger.verbose(&format!("status for '{url}': {status}"));
        let encoding = match response.headers().get("Content-Encoding") {
            Some(header_value) => header_value.to_str()?.to_owned(),
            None => String::from(""),
        };
        self.logger
            .verbose(&format!("encoding is '{encoding}' for '{url}'"));

        let body_bytes = response.bytes().await?;
        if encoding == "gzip" {
            let mut reader = GzDecoder::new(&body_bytes[..]);
            let mut buf: Vec<u8> = Vec::new();
            reader.read_to_end(&mut buf)?;
            return Ok(buf);
        }
        Ok(Vec::from(&body_bytes[..]))
    }
}
