use crate::macros::uuid_id;

uuid_id!(
    /// Identifier of a registered driver. Its textual form is the payload encoded
    /// into the driver's QR code.
    DriverId
);
