pub mod enums {
    pub mod site_variant;
    pub mod toggle_id;
}

pub mod shared {
    pub mod sidebar;
}
