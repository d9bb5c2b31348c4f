// The whole pipeline, top to bottom: probe server, list, select, connect,
// mirror. Strictly sequential; the only repeat visits are the single server
// re-probe and the connect-to-pairing fallback inside `wireless::establish`.
use crate::adb;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::{mirror, select};

pub async fn run(config: &Config) -> Result<()> {
    adb::server::ensure_server(config).await?;

    let records = adb::list::list_devices(config).await?;
    let Some(record) = select::select_device(records)? else {
        return Err(Error::NoDevices);
    };
    log::info!(
        "selected {} (state={}, wireless={})",
        record.id,
        record.state,
        record.is_wireless()
    );

    adb::wireless::establish(config, &record).await?;

    mirror::launch(config).await
}
