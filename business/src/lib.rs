pub mod application {
    pub mod listing {
        pub mod browse;
        pub mod create;
        pub mod create_bulk;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod category {
        pub mod model;
        pub mod repository;
    }
    pub mod listing {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod validation;
        pub mod value_objects;
        pub mod use_cases {
            pub mod browse;
            pub mod create;
            pub mod create_bulk;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
