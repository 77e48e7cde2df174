//! The inputs of an ata document. All of them are sparse, loosely-typed mappings in
//! the data store, so every field is optional and read through explicit presence
//! checks: values that are null, empty, `false` or `0` count as absent.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

type Object = Map<String, Value>;

/// The meeting record itself
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(from = "Object")]
pub struct Record {
    /// Meeting type, e.g. `sacramental`
    pub kind: Option<String>,
    pub date: Option<String>,
    pub community_name: Option<String>,
    /// Short name of the community, used when there's no full name
    pub alias: Option<String>,
    pub status: Option<String>,
}

/// One of the fixed kinds of ward business handled in the actions section
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionCategory {
    Releases,
    Sustainings,
    BaptismConfirmations,
    NewMemberSustainings,
    ChildBlessings,
}

impl ActionCategory {
    /// All categories, in the order they are laid out
    pub const ALL: [ActionCategory; 5] = [
        ActionCategory::Releases,
        ActionCategory::Sustainings,
        ActionCategory::BaptismConfirmations,
        ActionCategory::NewMemberSustainings,
        ActionCategory::ChildBlessings,
    ];

    /// Key of the category in details and template mappings
    pub fn key(self) -> &'static str {
        match self {
            ActionCategory::Releases => "desobrigacoes",
            ActionCategory::Sustainings => "apoios",
            ActionCategory::BaptismConfirmations => "confirmacoes_batismo",
            ActionCategory::NewMemberSustainings => "apoio_membro_novo",
            ActionCategory::ChildBlessings => "bencao_crianca",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActionCategory::Releases => "Desobrigações",
            ActionCategory::Sustainings => "Apoios",
            ActionCategory::BaptismConfirmations => "Confirmações Batismais",
            ActionCategory::NewMemberSustainings => "Apoio a Novos Membros",
            ActionCategory::ChildBlessings => "Bênção de Crianças",
        }
    }
}

/// What happened in the meeting
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(from = "Object")]
pub struct Details {
    pub theme: Option<String>,
    pub presiding: Option<String>,
    pub conducting: Option<String>,
    pub greeters: Vec<String>,
    pub acknowledged_presence: Option<String>,
    pub announcements: Vec<String>,
    pub opening_hymn: Option<String>,
    pub opening_prayer: Option<String>,
    /// Entries per action category; categories without entries are not present
    pub actions: BTreeMap<ActionCategory, Vec<String>>,
    pub sacrament_hymn: Option<String>,
    pub speakers: Vec<String>,
    pub last_speaker: Option<String>,
    pub intermediate_hymn: Option<String>,
    pub closing_hymn: Option<String>,
    pub closing_prayer: Option<String>,
}

impl Details {
    pub fn action(&self, category: ActionCategory) -> &[String] {
        self.actions
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Boilerplate text of a meeting type. Texts may contain placeholders, see
/// [Placeholders](crate::Placeholders).
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(from = "Object")]
pub struct Template {
    pub welcome: Option<String>,
    pub sacrament: Option<String>,
    pub messages: Option<String>,
    pub closing: Option<String>,
    /// Guidance read before the entries of an action category
    pub guidance: BTreeMap<ActionCategory, String>,
}

/// The first present value among `keys`
fn text(object: &Object, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| object.get(*key).and_then(scalar))
}

fn entries(object: &Object, key: &str) -> Vec<String> {
    object.get(key).map(list).unwrap_or_default()
}

/// A single value as text, or [None] when it is falsy
pub(crate) fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) | Value::Object(_) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) => {
            let items = list(value);
            (!items.is_empty()).then(|| items.join(", "))
        }
    }
}

/// A value that may be one entry or a list of them; falsy entries are dropped
pub(crate) fn list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(scalar).collect(),
        other => scalar(other).into_iter().collect(),
    }
}

impl From<&Object> for Record {
    fn from(object: &Object) -> Self {
        Record {
            kind: text(object, &["type", "tipo"]),
            date: text(object, &["date", "data"]),
            community_name: text(object, &["community_name", "ala_nome"]),
            alias: text(object, &["alias", "ala"]),
            status: text(object, &["status"]),
        }
    }
}

impl From<&Object> for Details {
    fn from(object: &Object) -> Self {
        let actions = ActionCategory::ALL
            .into_iter()
            .map(|category| (category, entries(object, category.key())))
            .filter(|(_, entries)| !entries.is_empty())
            .collect();

        Details {
            theme: text(object, &["tema"]),
            presiding: text(object, &["presidido_por", "presidida_por"]),
            conducting: text(object, &["dirigido_por", "dirigida_por"]),
            greeters: entries(object, "recepcionistas"),
            acknowledged_presence: text(object, &["reconhecemos_presenca"]),
            announcements: entries(object, "anuncios"),
            opening_hymn: text(object, &["hino_abertura"]),
            opening_prayer: text(object, &["oracao_abertura"]),
            actions,
            sacrament_hymn: text(object, &["hino_sacramental"]),
            speakers: entries(object, "discursantes"),
            last_speaker: text(object, &["ultimo_discursante"]),
            intermediate_hymn: text(object, &["hino_intermediario"]),
            closing_hymn: text(object, &["hino_encerramento"]),
            closing_prayer: text(object, &["oracao_encerramento"]),
        }
    }
}

impl From<&Object> for Template {
    fn from(object: &Object) -> Self {
        let guidance = ActionCategory::ALL
            .into_iter()
            .filter_map(|category| text(object, &[category.key()]).map(|t| (category, t)))
            .collect();

        Template {
            welcome: text(object, &["boas_vindas"]),
            sacrament: text(object, &["sacramento"]),
            messages: text(object, &["mensagens"]),
            closing: text(object, &["encerramento"]),
            guidance,
        }
    }
}

macro_rules! from_owned_object {
    ($($ty:ty),*) => {$(
        impl From<Object> for $ty {
            fn from(object: Object) -> Self {
                <$ty>::from(&object)
            }
        }
    )*};
}

from_owned_object!(Record, Details, Template);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_field_priority() {
        let record: Record = serde_json::from_value(json!({
            "tipo": "sacramental",
            "data": "2024-01-07",
            "ala": "Ala Centro",
            "ala_nome": "",
            "status": null,
        }))
        .expect("records are objects");

        assert_eq!(record.kind.as_deref(), Some("sacramental"));
        assert_eq!(record.date.as_deref(), Some("2024-01-07"));
        assert_eq!(record.community_name, None);
        assert_eq!(record.alias.as_deref(), Some("Ala Centro"));
        assert_eq!(record.status, None);
    }

    #[test]
    fn test_english_record_keys() {
        let record: Record =
            serde_json::from_value(json!({"type": "sacramental", "date": "2024-01-07"}))
                .expect("records are objects");
        assert_eq!(record.kind.as_deref(), Some("sacramental"));
        assert_eq!(record.date.as_deref(), Some("2024-01-07"));
    }

    #[test]
    fn test_falsy_values_are_absent() {
        let details = Details::from(
            json!({
                "tema": "",
                "hino_abertura": 0,
                "oracao_abertura": false,
                "anuncios": [],
                "discursantes": [null, "", "Irmão Silva"],
                "apoios": ["Irmã Souza"],
                "desobrigacoes": "",
            })
            .as_object()
            .expect("object literal"),
        );

        assert_eq!(details.theme, None);
        assert_eq!(details.opening_hymn, None);
        assert_eq!(details.opening_prayer, None);
        assert!(details.announcements.is_empty());
        assert_eq!(details.speakers, vec!["Irmão Silva"]);
        assert_eq!(details.action(ActionCategory::Sustainings), ["Irmã Souza"]);
        assert!(details.action(ActionCategory::Releases).is_empty());
        assert_eq!(details.actions.len(), 1);
    }

    #[test]
    fn test_string_or_list_fields() {
        let details = Details::from(
            json!({
                "anuncios": "Conferência de estaca",
                "recepcionistas": ["Irmão A", "Irmão B"],
                "hino_sacramental": 193,
            })
            .as_object()
            .expect("object literal"),
        );

        assert_eq!(details.announcements, vec!["Conferência de estaca"]);
        assert_eq!(details.greeters, vec!["Irmão A", "Irmão B"]);
        assert_eq!(details.sacrament_hymn.as_deref(), Some("193"));
    }

    #[test]
    fn test_template_guidance_per_category() {
        let template: Template = serde_json::from_value(json!({
            "boas_vindas": "Bem-vindos à [NOME]",
            "bencao_crianca": "Convidamos os portadores do sacerdócio",
            "mensagens": "",
        }))
        .expect("templates are objects");

        assert_eq!(template.welcome.as_deref(), Some("Bem-vindos à [NOME]"));
        assert_eq!(template.messages, None);
        assert_eq!(template.guidance.len(), 1);
        assert!(template.guidance.contains_key(&ActionCategory::ChildBlessings));
    }

    #[test]
    fn test_non_object_does_not_deserialize() {
        assert!(serde_json::from_value::<Details>(json!("texto")).is_err());
    }
}
