//! Binance P2P REST client.
//!
//! Implements [`OfferSource`] against the public C2C advertisement search
//! endpoint. The upstream response carries dozens of fields per ad; the DTO
//! below keeps only what the scanner consumes.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Offer, PaymentMethod};
use crate::error::{Error, Result};
use crate::port::OfferSource;

const SEARCH_PATH: &str = "/bapi/c2c/v2/friendly/c2c/adv/search";
const PAGE_ROWS: u32 = 20;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    page: u32,
    rows: u32,
    asset: &'a str,
    fiat: &'a str,
    trade_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Vec<AdvEntry>,
}

#[derive(Debug, Deserialize)]
struct AdvEntry {
    adv: Adv,
    advertiser: Advertiser,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Adv {
    price: String,
    #[serde(default)]
    surplus_amount: String,
    #[serde(default)]
    trade_methods: Vec<TradeMethod>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TradeMethod {
    #[serde(default)]
    identifier: String,
    #[serde(default)]
    trade_method_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Advertiser {
    nick_name: String,
}

impl From<AdvEntry> for Offer {
    fn from(entry: AdvEntry) -> Self {
        Offer {
            advertiser: entry.advertiser.nick_name,
            price: entry.adv.price,
            available_amount: entry.adv.surplus_amount,
            methods: entry
                .adv
                .trade_methods
                .into_iter()
                .map(|method| PaymentMethod {
                    identifier: method.identifier,
                    display_name: method.trade_method_name,
                })
                .collect(),
        }
    }
}

/// HTTP client for the Binance P2P advertisement search API.
pub struct BinanceP2pClient {
    http: HttpClient,
    base_url: String,
}

impl BinanceP2pClient {
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            http: HttpClient::new(),
            base_url,
        }
    }
}

#[async_trait]
impl OfferSource for BinanceP2pClient {
    async fn list_offers(&self, asset: &str, fiat: &str) -> Result<Vec<Offer>> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);
        let request = SearchRequest {
            page: 1,
            rows: PAGE_ROWS,
            asset,
            fiat,
            trade_type: "BUY",
        };

        debug!(asset, fiat, "fetching P2P offers");

        let response = self.http.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(Error::OfferService(format!(
                "offer API returned status {}",
                response.status()
            )));
        }

        let body: SearchResponse = response.json().await?;

        if !body.success {
            return Err(Error::OfferService("offer API reported failure".into()));
        }

        Ok(body.data.into_iter().map(Offer::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "code": "000000",
        "message": null,
        "data": [
            {
                "adv": {
                    "advNo": "1234",
                    "price": "151.2",
                    "surplusAmount": "880.50",
                    "tradeMethods": [
                        {"identifier": "BANK", "tradeMethodName": "Bank Transfer", "payType": null},
                        {"identifier": "LINEPay", "tradeMethodName": "LINE Pay"}
                    ]
                },
                "advertiser": {
                    "userNo": "u-1",
                    "nickName": "alice",
                    "monthOrderCount": 10
                }
            }
        ],
        "total": 1,
        "success": true
    }"#;

    #[test]
    fn deserializes_search_response() {
        let body: SearchResponse = serde_json::from_str(SAMPLE).expect("parse response");
        assert!(body.success);
        assert_eq!(body.data.len(), 1);

        let offer = Offer::from(body.data.into_iter().next().expect("one entry"));
        assert_eq!(offer.advertiser, "alice");
        assert_eq!(offer.price, "151.2");
        assert_eq!(offer.available_amount, "880.50");
        assert_eq!(offer.methods.len(), 2);
        assert_eq!(offer.methods[0].identifier, "BANK");
        assert_eq!(offer.methods[1].display_name, "LINE Pay");
    }

    #[test]
    fn unsuccessful_response_flag() {
        let body: SearchResponse =
            serde_json::from_str(r#"{"success": false, "data": []}"#).expect("parse response");
        assert!(!body.success);
    }

    #[test]
    fn search_request_uses_camel_case() {
        let request = SearchRequest {
            page: 1,
            rows: PAGE_ROWS,
            asset: "USDT",
            fiat: "JPY",
            trade_type: "BUY",
        };

        let json = serde_json::to_string(&request).expect("serialize request");
        assert!(json.contains("\"tradeType\":\"BUY\""));
        assert!(json.contains("\"rows\":20"));
    }
}
