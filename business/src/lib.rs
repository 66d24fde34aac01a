pub mod application {
    pub mod cart {
        pub mod add;
        pub mod clear;
        pub mod get_detail;
        pub mod get_summary;
        pub mod remove;
    }
    pub mod category {
        pub mod create;
        pub mod get_all;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_detail;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod session;
        pub mod use_cases {
            pub mod add;
            pub mod clear;
            pub mod get_detail;
            pub mod get_summary;
            pub mod remove;
        }
    }
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_detail;
            pub mod update;
        }
    }
}
