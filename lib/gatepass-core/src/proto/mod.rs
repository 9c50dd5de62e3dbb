pub(crate) mod registration_finalizer;
