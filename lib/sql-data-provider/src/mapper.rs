use gatepass_core::model::driver::SortDirection;
use gatepass_core::repository::error::DataLayerError;
use sea_orm::{DbErr, Order, SqlErr};

pub(crate) fn order_from_sort_direction(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Ascending => Order::Asc,
        SortDirection::Descending => Order::Desc,
    }
}

/// Constraint violations become typed errors, a duplicate plate surfaces as `AlreadyExists`
pub(crate) fn to_data_layer_error(error: DbErr) -> DataLayerError {
    match error.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DataLayerError::AlreadyExists,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => DataLayerError::IncorrectParameters,
        _ => DataLayerError::Db(error.into()),
    }
}

/// Like [`to_data_layer_error`], additionally reporting an update that matched no row
pub(crate) fn to_update_data_layer_error(error: DbErr) -> DataLayerError {
    if matches!(error, DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) {
        return DataLayerError::RecordNotUpdated;
    }
    to_data_layer_error(error)
}
