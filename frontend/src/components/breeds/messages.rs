use common::model::breed::Breed;

#[derive(Clone)]
pub enum Msg {
    Loaded(Vec<Breed>),
    Failed(String),
}
