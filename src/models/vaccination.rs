// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Vaccination details submitted after a player has been registered.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use serde::Deserialize;
use serde_json::{Value, json};

choices! {
    /// Vaccines recognised by the backend.
    pub enum VaccineName {
        Covishield => ("CVSHLD", "Covishield"),
        Covaxin => ("CVXN", "Covaxin"),
        Moderna => ("MDRN", "Moderna"),
        Sputnik => ("SPTNK", "Sputnik"),
        JohnsonAndJohnson => ("JNJ", "Johnson & Johnson"),
    }
}

/// Certificate file types the backend accepts.
pub const CERTIFICATE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "pdf"];

/// Vaccination branch chosen on the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VaccinationDetails {
    Vaccinated {
        name: VaccineName,
        certificate: PathBuf,
    },
    NotVaccinated {
        explanation: String,
    },
}

/// Multipart body for `POST /api/vaccination`, bound to a created player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VaccinationRequest {
    pub player_id: i64,
    pub details: VaccinationDetails,
}

impl VaccinationRequest {
    pub fn new(player_id: i64, details: VaccinationDetails) -> Self {
        Self { player_id, details }
    }

    /// JSON document carried in the `vaccination` form part.
    pub fn form_document(&self) -> Value {
        match &self.details {
            VaccinationDetails::Vaccinated { name, .. } => json!({
                "player_id": self.player_id,
                "is_vaccinated": true,
                "name": name,
            }),
            VaccinationDetails::NotVaccinated { explanation } => json!({
                "player_id": self.player_id,
                "is_vaccinated": false,
                "explain_not_vaccinated": explanation,
            }),
        }
    }

    /// Certificate to upload in the `certificate` part, if any.
    pub fn certificate(&self) -> Option<&Path> {
        match &self.details {
            VaccinationDetails::Vaccinated { certificate, .. } => Some(certificate),
            VaccinationDetails::NotVaccinated { .. } => None,
        }
    }
}

/// Stored vaccination record echoed back by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VaccinationRecord {
    pub player: i64,
    pub is_vaccinated: bool,
}

/// Reject certificate files the backend would not accept.
pub fn ensure_certificate_type(path: &Path) -> Result<()> {
    let allowed = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            CERTIFICATE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        });
    if !allowed {
        bail!("Vaccination certificate must be a PNG, JPG or PDF file.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vaccinated_document_names_vaccine_and_omits_explanation() {
        let request = VaccinationRequest::new(
            7,
            VaccinationDetails::Vaccinated {
                name: VaccineName::Covaxin,
                certificate: PathBuf::from("cert.pdf"),
            },
        );

        let doc = request.form_document();

        assert_eq!(doc["player_id"], json!(7));
        assert_eq!(doc["is_vaccinated"], json!(true));
        assert_eq!(doc["name"], json!("CVXN"));
        assert!(doc.get("explain_not_vaccinated").is_none());
        assert_eq!(request.certificate(), Some(Path::new("cert.pdf")));
    }

    #[test]
    fn unvaccinated_document_carries_explanation_only() {
        let request = VaccinationRequest::new(
            3,
            VaccinationDetails::NotVaccinated {
                explanation: "Medical exemption".into(),
            },
        );

        let doc = request.form_document();

        assert_eq!(doc["is_vaccinated"], json!(false));
        assert_eq!(doc["explain_not_vaccinated"], json!("Medical exemption"));
        assert!(doc.get("name").is_none());
        assert!(request.certificate().is_none());
    }

    #[test]
    fn certificate_type_check_is_case_insensitive() {
        assert!(ensure_certificate_type(Path::new("scan.PDF")).is_ok());
        assert!(ensure_certificate_type(Path::new("photo.jpeg")).is_ok());
        assert!(ensure_certificate_type(Path::new("notes.docx")).is_err());
        assert!(ensure_certificate_type(Path::new("no_extension")).is_err());
    }
}
