use sea_orm::{
    ColumnTrait, EntityTrait, QueryFilter, Select, UpdateMany,
    entity::prelude::DateTimeWithTimeZone,
};

/// Column accessors for tables using the `deleted_at` soft-delete convention.
/// Implemented by `#[base_entity]`.
pub trait SoftDeleteEntity: EntityTrait {
    fn id_column() -> Self::Column;
    fn name_column() -> Self::Column;
    fn deleted_at_column() -> Self::Column;

    /// `SELECT` restricted to rows that are not soft-deleted.
    fn find_active() -> Select<Self> {
        Self::find().filter(Self::deleted_at_column().is_null())
    }

    /// `UPDATE` restricted to rows that are not soft-deleted.
    fn update_active() -> UpdateMany<Self> {
        Self::update_many().filter(Self::deleted_at_column().is_null())
    }
}

pub trait HasIdActiveModel {
    fn set_id(&mut self, id: String);
}

pub trait TimestampedActiveModel {
    fn set_created_at(&mut self, ts: DateTimeWithTimeZone);
    fn set_updated_at(&mut self, ts: DateTimeWithTimeZone);
}
