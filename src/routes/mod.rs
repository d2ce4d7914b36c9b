pub mod tracking_route;
