use serde::{Deserialize, Serialize};

/// names of the source CSV columns holding each business attribute.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatasetColumns {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_latitude")]
    pub latitude: String,
    #[serde(default = "default_longitude")]
    pub longitude: String,
    /// optional, rows get no address when the column is absent from the file
    #[serde(default = "default_address", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Default for DatasetColumns {
    fn default() -> Self {
        Self {
            category: default_category(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            address: default_address(),
        }
    }
}

fn default_category() -> String {
    String::from("categoria_negocio")
}

fn default_latitude() -> String {
    String::from("latitud")
}

fn default_longitude() -> String {
    String::from("longitud")
}

fn default_address() -> Option<String> {
    Some(String::from("direccion"))
}
