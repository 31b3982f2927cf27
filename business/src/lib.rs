pub mod application {
    pub mod catalog {
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_categories;
    }
    pub mod cart {
        pub(crate) mod session;

        pub mod add;
        pub mod clear;
        pub mod get;
        pub mod remove;
        pub mod update_quantity;
    }
    pub mod checkout {
        pub mod confirm_payment;
        pub mod place_order;
    }
    pub mod relay {
        pub mod forward;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_categories;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod observer;
        pub mod repository;
        pub mod store;
        pub mod use_cases {
            pub mod add;
            pub mod clear;
            pub mod get;
            pub mod remove;
            pub mod update_quantity;
        }
    }
    pub mod checkout {
        pub mod errors;
        pub mod model;
        pub mod payment_method;
        pub mod use_cases {
            pub mod confirm_payment;
            pub mod place_order;
        }
    }
    pub mod relay {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod forward;
        }
    }
}
