use address::{Endpoint, LocalInterface};
use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

pub fn to_bytes(text: &str) -> Result<String> {
    let bytes = address::ascii_to_bytes(text)
        .with_context(|| format!("Not an IP address: {:?}", text))?;
    Ok(hex::encode(bytes))
}

pub fn to_text(hex_bytes: &str) -> Result<String> {
    let bytes = hex::decode(hex_bytes.trim())
        .with_context(|| format!("Invalid hex input: {:?}", hex_bytes))?;
    address::bytes_to_ascii(&bytes)
        .with_context(|| format!("Expected 4 or 16 bytes, got {}", bytes.len()))
}

pub fn to_net(dotted: &str) -> Result<u32> {
    Ok(address::ascii_to_net(dotted)?)
}

pub fn from_net(value: u32) -> String {
    address::net_to_ascii(value)
}

pub fn interfaces(include_loopback: bool) -> Result<Vec<LocalInterface>> {
    let interfaces = address::local_interfaces().context("Failed to query local interfaces")?;
    let total = interfaces.len();
    let selected: Vec<LocalInterface> = interfaces
        .into_iter()
        .filter(|i| include_loopback || !i.loopback)
        .collect();
    debug!("Selected {} of {} interface addresses", selected.len(), total);
    Ok(selected)
}

/// Validity of one `HOST:PORT` argument.
#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    Valid(Endpoint),
    Rejected(Endpoint),
    Unparsable(String),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid(_))
    }
}

pub fn validate(inputs: &[String]) -> Vec<Verdict> {
    inputs
        .iter()
        .map(|input| match input.parse::<Endpoint>() {
            Ok(endpoint) if address::is_valid_endpoint(&endpoint) => Verdict::Valid(endpoint),
            Ok(endpoint) => Verdict::Rejected(endpoint),
            Err(e) => {
                warn!("{}", e);
                Verdict::Unparsable(input.clone())
            }
        })
        .collect()
}

pub fn describe(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Valid(endpoint) => format!("{} valid", endpoint),
        Verdict::Rejected(endpoint) if endpoint.addr().is_unspecified() => {
            format!("{} invalid (address not set)", endpoint)
        }
        Verdict::Rejected(endpoint) => format!(
            "{} invalid (port outside {}-{})",
            endpoint,
            address::MIN_VALID_PORT,
            address::MAX_VALID_PORT
        ),
        Verdict::Unparsable(input) => format!("{} invalid (not HOST:PORT)", input),
    }
}

/// Fails when any verdict is not valid, after all have been reported.
pub fn ensure_all_valid(verdicts: &[Verdict]) -> Result<()> {
    let rejected = verdicts.iter().filter(|v| !v.is_valid()).count();
    if rejected > 0 {
        bail!("{} of {} endpoints rejected", rejected, verdicts.len());
    }
    Ok(())
}
