use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::database::schema::cities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Place {
    pub id: i32,
    pub name: String,
    pub state: String
}

pub struct NewPlace<'de> {
    pub name: &'de str,
    pub state: &'de str
}
