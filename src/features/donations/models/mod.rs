mod donation;

pub use donation::{Donation, DonationStatus, NewDonation};
