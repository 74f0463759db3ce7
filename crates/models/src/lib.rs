pub mod db;
pub mod kyc_entity;
pub mod entity_address;
pub mod entity_name;
pub mod entity_date;

#[cfg(test)]
mod tests;
