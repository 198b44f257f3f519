pub mod contact_details;
pub mod identity;
pub mod new_user;
pub mod role;
pub mod role_transition;
pub mod user_filter;
pub mod user_record;
