use super::{certification, course, institution, recover, report};
use crate::{
    db::db::Db,
    libs::{messages::Message, prompt},
    msg_print,
};
use anyhow::Result;

/// Top-level interactive loop; returns when the user picks Exit or dismisses the menu.
pub fn cmd(db: &Db) -> Result<()> {
    let options = vec![
        "Manage Institutions".to_string(),
        "Manage Courses".to_string(),
        "Manage Certifications".to_string(),
        "View Reports".to_string(),
        "Exit".to_string(),
    ];

    msg_print!(Message::MainMenuTitle, true);

    loop {
        let result = match prompt::select(Message::SelectMainAction, &options)? {
            Some(0) => institution::interactive(db),
            Some(1) => course::interactive(db),
            Some(2) => certification::interactive(db),
            Some(3) => report::interactive(db),
            _ => break,
        };
        recover(result)?;
    }

    msg_print!(Message::Goodbye);
    Ok(())
}
