//! Interactive configuration wizard.
//!
//! Runs before any database is opened, so a broken database path can always
//! be fixed from here.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
