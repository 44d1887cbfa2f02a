//! Validated terminal input.
//!
//! This is the boundary where raw text becomes plain values: required text is
//! re-prompted until non-blank, years until numeric, dates until they parse as
//! `YYYY-MM-DD`. The parsing rules are plain functions so they can be tested
//! without a terminal.

use crate::libs::messages::Message;
use crate::libs::status::parse_date;
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// Input that clears an optional date while editing.
pub const CLEAR_MARKER: &str = "-";

pub fn parse_year(input: &str) -> Result<Option<i32>, Message> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(Message::InvalidYear);
    }
    trimmed.parse::<i32>().map(Some).map_err(|_| Message::InvalidYear)
}

pub fn parse_optional_date(input: &str) -> Result<Option<NaiveDate>, Message> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_date(trimmed).map(Some).map_err(|_| Message::InvalidDate)
}

/// Turns an edited date into an update field: `None` keeps the stored value,
/// `Some(None)` clears it, `Some(Some(date))` replaces it.
pub fn parse_date_edit(input: &str, current: Option<NaiveDate>) -> Result<Option<Option<NaiveDate>>, Message> {
    let trimmed = input.trim();
    if trimmed == CLEAR_MARKER {
        return Ok(current.map(|_| None));
    }
    match parse_optional_date(trimmed)? {
        None => Ok(None),
        Some(date) if Some(date) == current => Ok(None),
        Some(date) => Ok(Some(Some(date))),
    }
}

/// Turns an edited text value into an update field; unchanged or blank keeps.
pub fn text_change(input: &str, current: Option<&str>) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() || Some(trimmed) == current {
        return None;
    }
    Some(trimmed.to_string())
}

pub fn year_change(input: &str, current: Option<i32>) -> Result<Option<i32>, Message> {
    Ok(parse_year(input)?.filter(|year| Some(*year) != current))
}

pub fn required_text(prompt: Message) -> Result<String> {
    let empty_msg = Message::FieldCannotBeEmpty.to_string();
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                Err(empty_msg.clone())
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

pub fn optional_text(prompt: Message) -> Result<Option<String>> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(text_change(&value, None))
}

/// Edits a text field, offering the current value as the default.
pub fn edit_text(prompt: Message, current: Option<&str>) -> Result<Option<String>> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt.to_string()).allow_empty(true);
    if let Some(current) = current {
        input = input.default(current.to_string());
    }
    let value = input.interact_text()?;
    Ok(text_change(&value, current))
}

pub fn optional_year(prompt: Message) -> Result<Option<i32>> {
    let value = validated_input(prompt, None, |input| parse_year(input).map(|_| ()))?;
    Ok(parse_year(&value).unwrap_or(None))
}

pub fn edit_year(prompt: Message, current: Option<i32>) -> Result<Option<i32>> {
    let value = validated_input(prompt, current.map(|y| y.to_string()), |input| parse_year(input).map(|_| ()))?;
    Ok(year_change(&value, current).unwrap_or(None))
}

pub fn optional_date(prompt: Message) -> Result<Option<NaiveDate>> {
    let value = validated_input(prompt, None, |input| parse_optional_date(input).map(|_| ()))?;
    Ok(parse_optional_date(&value).unwrap_or(None))
}

pub fn edit_date(prompt: Message, current: Option<NaiveDate>) -> Result<Option<Option<NaiveDate>>> {
    let value = validated_input(prompt, current.map(|d| d.to_string()), |input| {
        parse_date_edit(input, current).map(|_| ())
    })?;
    Ok(parse_date_edit(&value, current).unwrap_or(None))
}

fn validated_input<F>(prompt: Message, default: Option<String>, check: F) -> Result<String>
where
    F: Fn(&str) -> Result<(), Message>,
{
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(prompt.to_string())
        .allow_empty(true)
        .validate_with(move |value: &String| -> Result<(), String> { check(value).map_err(|msg| msg.to_string()) });
    if let Some(default) = default {
        input = input.default(default);
    }
    Ok(input.interact_text()?)
}

pub fn confirm(prompt: Message) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}

/// Lets the user pick one of `items`; `None` when the list is dismissed.
pub fn select(prompt: Message, items: &[String]) -> Result<Option<usize>> {
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(items)
        .default(0)
        .interact_opt()?)
}
