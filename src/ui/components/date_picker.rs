// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Calendar date picker in MVU style, used for the date of birth.

use chrono::NaiveDate;
use eframe::egui;
use egui_extras::DatePickerButton;

/// Date the calendar opens on before the user has chosen anything.
const INITIAL_DATE: (i32, u32, u32) = (2000, 1, 1);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateModel {
    /// Selected date; `None` until the user picks one.
    pub date: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateMsg {
    SetDate(NaiveDate),
    Clear,
}

/// Apply a message to the date model.
pub fn update(model: &mut DateModel, msg: DateMsg) {
    match msg {
        DateMsg::SetDate(date) => model.date = Some(date),
        DateMsg::Clear => model.date = None,
    }
}

/// Render the picker and return any triggered messages.
pub fn view(model: &DateModel, ui: &mut egui::Ui, id_salt: &str) -> Vec<DateMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| match model.date {
        Some(mut date) => {
            if ui
                .add(DatePickerButton::new(&mut date).id_salt(id_salt).show_icon(true))
                .changed()
            {
                msgs.push(DateMsg::SetDate(date));
            }
            if ui
                .small_button(egui_phosphor::regular::X)
                .on_hover_text("Clear date")
                .clicked()
            {
                msgs.push(DateMsg::Clear);
            }
        }
        None => {
            if ui
                .button(format!("{} Select date", egui_phosphor::regular::CALENDAR_BLANK))
                .clicked()
                && let Some(initial) = initial_date()
            {
                msgs.push(DateMsg::SetDate(initial));
            }
        }
    });

    msgs
}

/// Validate a birth date relative to `today`.
pub fn to_birth_date(model: &DateModel, today: NaiveDate) -> Result<NaiveDate, String> {
    let date = model
        .date
        .ok_or_else(|| "Please select a date of birth.".to_string())?;
    if date > today {
        return Err("Date of birth cannot be in the future.".into());
    }
    Ok(date)
}

fn initial_date() -> Option<NaiveDate> {
    let (y, m, d) = INITIAL_DATE;
    NaiveDate::from_ymd_opt(y, m, d)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn missing_date_is_rejected() {
        let model = DateModel::default();
        assert_eq!(
            to_birth_date(&model, today()).unwrap_err(),
            "Please select a date of birth."
        );
    }

    #[test]
    fn future_date_is_rejected_but_today_is_allowed() {
        let mut model = DateModel::default();
        update(
            &mut model,
            DateMsg::SetDate(NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()),
        );
        assert!(to_birth_date(&model, today()).is_err());

        update(&mut model, DateMsg::SetDate(today()));
        assert_eq!(to_birth_date(&model, today()), Ok(today()));
    }

    #[test]
    fn clear_unsets_the_date() {
        let mut model = DateModel {
            date: Some(today()),
        };
        update(&mut model, DateMsg::Clear);
        assert!(model.date.is_none());
    }

    #[test]
    fn initial_date_is_valid() {
        assert!(initial_date().is_some());
    }
}
