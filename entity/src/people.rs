use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub locations: String,
    pub gender: String,
    pub dimensions: String,
    pub weapons: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_favorite_people::Entity")]
    UserFavoritePeople,
}

impl Related<super::user_favorite_people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavoritePeople.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_favorite_people::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_favorite_people::Relation::People.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
