//! Client entity model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use annuaire_core::types::DbId;

/// A row from the `client` table.
///
/// Serializes with camelCase field names, matching the public API
/// contract (`raisonSociale`, `adresseRue`, ...).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: DbId,
    pub raison_sociale: String,
    pub adresse_rue: String,
    pub code_postal: String,
    pub ville: String,
    pub telephone: String,
    pub courriel: String,
}

/// DTO for creating a client, or fully replacing one on update.
///
/// All six fields are mandatory; the handlers validate presence and
/// non-blankness against the raw JSON body before deserializing into
/// this struct, so deserialization itself cannot produce field errors.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClient {
    pub raison_sociale: String,
    pub adresse_rue: String,
    pub code_postal: String,
    pub ville: String,
    pub telephone: String,
    pub courriel: String,
}
