use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub name_tamil: String,
    pub slug: String,
    pub color: String,
    pub icon: String,
    pub is_active: bool,
    pub order: i32,
}

// Copia reducida de la categoría que viaja dentro de cada noticia
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub name_tamil: String,
    pub slug: String,
    pub color: String,
}

impl From<&Category> for CategoryRef {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            name_tamil: category.name_tamil.clone(),
            slug: category.slug.clone(),
            color: category.color.clone(),
        }
    }
}
