//! Shared fixtures for BioLeadIQ tests.

use bioleadiq_common::{FundingRecord, Profile};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub use pretty_assertions;

/// Profile CSV in the source layout, one row with blank cells.
pub const SAMPLE_PROFILES_CSV: &str = "\
name,title,company,person_location,company_hq,linkedin_url
Dr. Maya Chen,Director of Toxicology,Hepatix Bio,\"Boston, MA\",\"Cambridge, MA\",https://www.linkedin.com/in/mayachen
Lucas Patel,Senior Scientist,LiverWorks,\"San Diego, CA\",\"San Diego, CA\",https://www.linkedin.com/in/lucaspatel
Jordan Blake,Account Manager,Unlisted Labs,\"Tokyo, Japan\",Tokyo,https://www.linkedin.com/in/jordanblake
Amelia Rossi,Head of In Vitro Models,Organo Systems,\"Basel, Switzerland\",Basel,https://www.linkedin.com/in/ameliarossi
,,,,,
";

/// Funding dataset in the source layout, including a non-numeric year.
pub const SAMPLE_FUNDING_JSON: &str = r#"[
  { "company": "Hepatix Bio", "funding_stage": "Series B", "last_funding_year": 2024 },
  { "company": "LiverWorks", "funding_stage": "Seed", "last_funding_year": 2021 },
  { "company": "Organo Systems", "funding_stage": "Public", "last_funding_year": "n/a" }
]"#;

pub fn profile(name: &str, title: &str, company: &str, person_location: &str) -> Profile {
    Profile {
        name: name.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        person_location: person_location.to_string(),
        company_hq: String::new(),
        linkedin_url: format!("https://www.linkedin.com/in/{}", name.to_lowercase().replace(' ', "")),
    }
}

pub fn funding(company: &str, funding_stage: &str, last_funding_year: Option<i32>) -> FundingRecord {
    FundingRecord {
        company: company.to_string(),
        funding_stage: funding_stage.to_string(),
        last_funding_year,
    }
}

/// A one-shot loopback HTTP responder.
pub struct LoopbackServer {
    /// esearch-shaped URL pointing at the responder.
    pub url: String,
    /// Resolves to the raw request head the responder received.
    pub request: JoinHandle<String>,
}

/// Serve a single response with the given status and JSON body, then close.
pub async fn serve_json_once(status: u16, body: impl Into<String>) -> LoopbackServer {
    let body = body.into();
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback listener");
    let addr = listener.local_addr().expect("loopback address");

    let request = tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return String::new();
        };
        let mut buf = vec![0u8; 16 * 1024];
        let n = socket.read(&mut buf).await.unwrap_or(0);
        let head = String::from_utf8_lossy(&buf[..n]).to_string();

        let reason = if status == 200 { "OK" } else { "Error" };
        let response = format!(
            "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
        head
    });

    LoopbackServer {
        url: format!("http://{addr}/entrez/eutils/esearch.fcgi"),
        request,
    }
}

/// URL on a loopback port with nothing listening.
pub fn closed_loopback_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let port = listener.local_addr().expect("loopback address").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/entrez/eutils/esearch.fcgi")
}
