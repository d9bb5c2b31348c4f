// Connection state machine for the selected device.
//
// Wireless records go through connect / pair-then-connect; USB records only
// need their authorization state checked, adb already owns the transport.
use super::exec::run_adb;
use super::outcome::{classify_connect, classify_pair};
use super::types::{DeviceRecord, Endpoint};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::prompt;

/// First step for a selected device, decided purely from its listing entry.
#[derive(Debug, PartialEq)]
pub enum ConnectPlan {
    /// Wireless and already authorized: try the listed endpoint as-is.
    DirectConnect(Endpoint),
    /// Wireless in any other state: go straight to pairing.
    PairFirst { ip: String },
    /// USB and authorized: nothing to establish.
    UsbReady,
}

/// Maps a record to its first connection step. The only fatal case is a USB
/// device that is not in `device` state: the operator has to accept the
/// debugging prompt on the phone, which we cannot do for them.
pub fn plan_for(record: &DeviceRecord) -> Result<ConnectPlan> {
    match &record.endpoint {
        Some(endpoint) if record.is_authorized() => {
            Ok(ConnectPlan::DirectConnect(endpoint.clone()))
        }
        Some(endpoint) => Ok(ConnectPlan::PairFirst {
            ip: endpoint.ip.clone(),
        }),
        None if record.is_authorized() => Ok(ConnectPlan::UsbReady),
        None => Err(Error::DeviceNotAuthorized {
            serial: record.id.clone(),
            state: record.state.clone(),
        }),
    }
}

/// Drives the plan to a connected device, prompting the operator where the
/// pairing flow needs ports and the 6-digit code.
pub async fn establish(config: &Config, record: &DeviceRecord) -> Result<()> {
    match plan_for(record)? {
        ConnectPlan::UsbReady => {
            log::debug!("{} is a ready USB device, nothing to connect", record.id);
            Ok(())
        }
        ConnectPlan::DirectConnect(endpoint) => {
            // An already-authorized device may still have gone stale since
            // the listing; a rejected connect falls back to pairing rather
            // than aborting.
            match connect(config, &endpoint.address()).await {
                Ok(()) => Ok(()),
                Err(Error::ConnectRejected { address, detail }) => {
                    log::warn!("direct connect to {address} rejected: {detail}");
                    println!("Direct connect failed, falling back to pairing.");
                    pair_then_connect(config, &endpoint.ip).await
                }
                Err(other) => Err(other),
            }
        }
        ConnectPlan::PairFirst { ip } => pair_then_connect(config, &ip).await,
    }
}

/// One-time pairing, then a session connect on a separately prompted port.
/// The pairing port is never reused for the session: the phone advertises a
/// different port under "Wireless debugging" once paired.
async fn pair_then_connect(config: &Config, ip: &str) -> Result<()> {
    println!("On the device, open Developer options > Wireless debugging > Pair device with pairing code.");
    let pairing_port = prompt::read_line("Pairing port: ")?;
    let code = prompt::read_line("6-digit pairing code: ")?;
    pair(config, &format!("{ip}:{pairing_port}"), &code).await?;

    let connect_port = prompt::read_line("Connection port (shown on the Wireless debugging screen): ")?;
    connect(config, &format!("{ip}:{connect_port}")).await
}

/// `adb connect <address>`, success decided by the outcome table.
pub async fn connect(config: &Config, address: &str) -> Result<()> {
    println!("Connecting to {address}...");
    let out = run_adb(config, &["connect", address]).await?;
    if classify_connect(&out).is_success() {
        println!("✅ Connected to {address}");
        Ok(())
    } else {
        Err(Error::ConnectRejected {
            address: address.to_string(),
            detail: out.detail(),
        })
    }
}

/// `adb pair <address> <code>`, success decided by the outcome table.
async fn pair(config: &Config, address: &str, code: &str) -> Result<()> {
    println!("Pairing with {address}...");
    let out = run_adb(config, &["pair", address, code]).await?;
    if classify_pair(&out).is_success() {
        println!("✅ Paired with {address}");
        Ok(())
    } else {
        Err(Error::PairingRejected {
            address: address.to_string(),
            detail: out.detail(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str) -> DeviceRecord {
        DeviceRecord::from_line(line).unwrap()
    }

    #[test]
    fn authorized_wireless_plans_direct_connect() {
        let plan = plan_for(&record("192.168.1.5:5555  device")).unwrap();
        assert_eq!(
            plan,
            ConnectPlan::DirectConnect(Endpoint {
                ip: "192.168.1.5".to_string(),
                port: "5555".to_string(),
            })
        );
    }

    #[test]
    fn unauthorized_wireless_plans_pairing() {
        for state in ["unauthorized", "offline"] {
            let plan = plan_for(&record(&format!("10.0.0.7:41234 {state}"))).unwrap();
            assert_eq!(
                plan,
                ConnectPlan::PairFirst {
                    ip: "10.0.0.7".to_string()
                },
                "{state}"
            );
        }
    }

    #[test]
    fn authorized_usb_needs_nothing() {
        assert_eq!(plan_for(&record("ABC123 device")).unwrap(), ConnectPlan::UsbReady);
    }

    #[test]
    fn unauthorized_usb_is_fatal() {
        let err = plan_for(&record("ABC123 unauthorized")).unwrap_err();
        match err {
            Error::DeviceNotAuthorized { serial, state } => {
                assert_eq!(serial, "ABC123");
                assert_eq!(state, "unauthorized");
            }
            other => panic!("expected DeviceNotAuthorized, got {other:?}"),
        }
    }
}
