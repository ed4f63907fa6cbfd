//! HTTP surface for shoprank
//!
//! | Method | Path                          | Body / query                                 |
//! |--------|-------------------------------|----------------------------------------------|
//! | GET    | `/health`                     |                                              |
//! | GET    | `/items/{product_id}`         |                                              |
//! | POST   | `/recommend`                  | `{product_id? , query?, user_id?, nums?}`    |
//! | GET    | `/recommend/item/{product_id}`| `?nums=`                                     |
//! | GET    | `/recommend/text`             | `?q=&nums=`                                  |
//! | GET    | `/recommend/user/{user_id}`   | `?nums=`                                     |

pub mod rest;

pub use rest::RestApi;
