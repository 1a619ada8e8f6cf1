pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get_summary;
        pub mod remove_item;
        pub mod seed;
        pub mod support;
        pub mod update_quantity;

        #[cfg(test)]
        pub(crate) mod test_support;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod events;
        pub mod model;
        pub mod summary;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get_summary;
            pub mod remove_item;
            pub mod seed;
            pub mod update_quantity;
        }
    }
    pub mod product {
        pub mod catalog;
        pub mod errors;
        pub mod model;
        pub mod repository;
    }
    pub mod shared {
        pub mod value_objects;
    }
}
