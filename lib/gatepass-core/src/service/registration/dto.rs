#[derive(Clone, Debug, Default)]
pub struct RegisterDriverRequestDTO {
    pub full_name: String,
    pub nin: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub vehicle_registration_number: String,
    pub vehicle_type: String,
    pub vehicle_color: String,
    pub vehicle_model: String,
    pub passport_photo: Option<PassportPhotoDTO>,
}

#[derive(Clone, Debug)]
pub struct PassportPhotoDTO {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub content: Vec<u8>,
}
