//! Remote Alertmanager clients

mod legacy;

pub use legacy::HttpLegacyAlertmanager;
