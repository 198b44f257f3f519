mod new_user;
mod role;
mod role_transition;
mod user_filter;
mod user_record;
