use crate::domain::a001_category::aggregate::Category;
use crate::domain::a005_section::aggregate::Section;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoriesPage {
    pub categories: Vec<Category>,
    pub sections: Vec<Section>,
}
