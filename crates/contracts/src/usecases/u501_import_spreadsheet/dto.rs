use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::null_as_default;

pub const FILES_RESOURCE: &str = "files";

/// Kind of spreadsheet accepted by `POST /upload` (`file_type` form field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportType {
    EstoqueFisico,
    ObrasPerfis,
    FuturasObras,
    Compras,
}

impl ImportType {
    pub fn all() -> [ImportType; 4] {
        [
            ImportType::EstoqueFisico,
            ImportType::ObrasPerfis,
            ImportType::FuturasObras,
            ImportType::Compras,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImportType::EstoqueFisico => "estoque-fisico",
            ImportType::ObrasPerfis => "obras-perfis",
            ImportType::FuturasObras => "futuras-obras",
            ImportType::Compras => "compras",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImportType::EstoqueFisico => "Planilha - Atualização Estoque Físico",
            ImportType::ObrasPerfis => "Planilha de Obras (Perfis e Acessórios)",
            ImportType::FuturasObras => "Planilha de Futuras Obras",
            ImportType::Compras => "Planilha de Compras",
        }
    }

    /// Obra/compra spreadsheets are stored under a user-given name.
    pub fn requires_entity_name(&self) -> bool {
        !matches!(self, ImportType::EstoqueFisico)
    }

    pub fn entity_label(&self) -> &'static str {
        match self {
            ImportType::Compras => "Compra",
            _ => "Obra",
        }
    }

    pub fn asks_replace(&self) -> bool {
        matches!(self, ImportType::EstoqueFisico)
    }
}

/// Non-file fields of the multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFields {
    pub file_type: ImportType,
    pub descricao_obra: Option<String>,
    pub replace: bool,
}

impl UploadFields {
    /// `entity_name` is the name typed by the user; blank falls back to the
    /// file name without its extension.
    pub fn new(file_type: ImportType, file_name: &str, entity_name: &str, replace: bool) -> Self {
        let descricao_obra = file_type.requires_entity_name().then(|| {
            let typed = entity_name.trim();
            if typed.is_empty() {
                file_stem(file_name).to_string()
            } else {
                typed.to_string()
            }
        });
        Self {
            file_type,
            descricao_obra,
            replace: replace && file_type.asks_replace(),
        }
    }

    /// Form fields in the order they are appended after `file`.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("file_type", self.file_type.as_str().to_string())];
        if let Some(name) = &self.descricao_obra {
            fields.push(("descricao_obra", name.clone()));
        }
        if self.replace {
            fields.push(("replace", "True".to_string()));
        }
        fields
    }
}

/// `planilha.final.xlsx` -> `planilha.final`; names without a dot are kept.
pub fn file_stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < file_name.len() && !file_name[idx + 1..].contains('/') => {
            &file_name[..idx]
        }
        _ => file_name,
    }
}

/// Processing status of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStatus {
    Sucesso,
    Erro,
    Processando,
    Other,
}

impl ImportStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "sucesso" => ImportStatus::Sucesso,
            "erro" => ImportStatus::Erro,
            "processando" => ImportStatus::Processando,
            _ => ImportStatus::Other,
        }
    }
}

/// Row of `GET /files`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportedFileDto {
    #[serde(alias = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_filename: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_downloadable: bool,
}

impl ImportedFileDto {
    pub fn status_kind(&self) -> ImportStatus {
        ImportStatus::parse(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_type_wire_names() {
        for t in ImportType::all() {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
            assert_eq!(ImportType::from_wire(t.as_str()), Some(t));
        }
        assert_eq!(ImportType::from_wire("pdf"), None);
    }

    #[test]
    fn test_entity_name_falls_back_to_file_stem() {
        let fields = UploadFields::new(ImportType::ObrasPerfis, "Obra Centro.xlsx", "   ", false);
        assert_eq!(fields.descricao_obra.as_deref(), Some("Obra Centro"));

        let fields = UploadFields::new(ImportType::Compras, "pedido.xls", " Pedido 7 ", false);
        assert_eq!(fields.descricao_obra.as_deref(), Some("Pedido 7"));
        assert_eq!(ImportType::Compras.entity_label(), "Compra");
    }

    #[test]
    fn test_replace_only_for_stock() {
        let fields = UploadFields::new(ImportType::EstoqueFisico, "estoque.xlsx", "", true);
        assert_eq!(
            fields.form_fields(),
            vec![
                ("file_type", "estoque-fisico".to_string()),
                ("replace", "True".to_string()),
            ]
        );

        let fields = UploadFields::new(ImportType::FuturasObras, "f.xlsx", "", true);
        assert!(!fields.replace);
        assert_eq!(fields.form_fields().len(), 2);
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("a.b.xlsx"), "a.b");
        assert_eq!(file_stem("sem_extensao"), "sem_extensao");
        assert_eq!(file_stem(".hidden"), ".hidden");
    }

    #[test]
    fn test_imported_file_status() {
        let file: ImportedFileDto = serde_json::from_str(
            r#"{"_id":"9","original_filename":"x.xlsx","file_type":"compras",
                "created_at":"2025-01-02T10:00:00","status":"Sucesso","is_downloadable":true}"#,
        )
        .unwrap();
        assert_eq!(file.id, "9");
        assert_eq!(file.status_kind(), ImportStatus::Sucesso);
        assert_eq!(ImportStatus::parse("fila"), ImportStatus::Other);
    }
}
