//! # Concrete and Post Depth
//!
//! Burial depth, stocked post length and concrete bags for setting posts.
//!
//! ## Rules
//!
//! - Burial depth is half the above-ground height, never less than 24".
//! - Post length is height + burial rounded **up** to a stocked length
//!   (8, 10 or 12 ft). Longer posts are special orders, rounded up to the
//!   next whole foot.
//! - Bags per post depend on post section and bag size:
//!
//! | Section       | 50 lb | 60 lb | 80 lb |
//! |---------------|-------|-------|-------|
//! | 4-inch class  | 1.5   | 1.25  | 1.0   |
//! | 6x6           | 2.5   | 2.0   | 1.5   |
//!
//! ## Example
//!
//! ```rust
//! use fence_core::calculations::concrete::{burial_depth_in, standard_post_length_ft};
//!
//! assert_eq!(burial_depth_in(6), 36);
//! assert_eq!(standard_post_length_ft(6, 36), (10, false));
//! ```

use serde::{Deserialize, Serialize};

use super::{ceil_count, CEIL_TOLERANCE};
use crate::materials::PostSection;
use crate::project::{BagSize, ProjectSpec};

/// Minimum burial depth (in)
pub const MIN_BURIAL_DEPTH_IN: u32 = 24;

/// Post lengths carried as stock (ft)
pub const STOCK_POST_LENGTHS_FT: [u32; 3] = [8, 10, 12];

/// Post depth and concrete result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDepth {
    pub burial_depth_in: u32,
    /// Height plus burial depth before rounding (ft)
    pub required_length_ft: f64,
    /// Stocked post length to buy (ft)
    pub standard_post_length_ft: u32,
    /// Required length exceeds every stocked length
    pub special_order: bool,
    pub post_section: PostSection,
    pub bag_size: BagSize,
    pub bags_per_post: f64,
    pub post_count: u64,
    /// Bags to order, 0 when concrete is disabled
    pub total_bags: u64,
}

/// Burial depth (in): `max(24, ceil(height_in / 2))`
pub fn burial_depth_in(height_ft: u32) -> u32 {
    let height_in = height_ft * 12;
    MIN_BURIAL_DEPTH_IN.max(height_in.div_ceil(2))
}

/// Round height + burial up to a stocked length.
///
/// Returns `(length_ft, special_order)`.
pub fn standard_post_length_ft(height_ft: u32, burial_in: u32) -> (u32, bool) {
    let required = required_length_ft(height_ft, burial_in);
    match STOCK_POST_LENGTHS_FT
        .iter()
        .copied()
        .find(|&stock| f64::from(stock) >= required - CEIL_TOLERANCE)
    {
        Some(stock) => (stock, false),
        None => (ceil_count(required) as u32, true),
    }
}

fn required_length_ft(height_ft: u32, burial_in: u32) -> f64 {
    f64::from(height_ft) + f64::from(burial_in) / 12.0
}

/// Bags of concrete per post hole
pub fn bags_per_post(section: PostSection, bag: BagSize) -> f64 {
    match (section, bag) {
        (PostSection::FourInchClass, BagSize::Lb50) => 1.5,
        (PostSection::FourInchClass, BagSize::Lb60) => 1.25,
        (PostSection::FourInchClass, BagSize::Lb80) => 1.0,
        (PostSection::SixBySix, BagSize::Lb50) => 2.5,
        (PostSection::SixBySix, BagSize::Lb60) => 2.0,
        (PostSection::SixBySix, BagSize::Lb80) => 1.5,
    }
}

/// Compute post depth and concrete for `post_count` posts.
pub fn post_depth(spec: &ProjectSpec, post_count: u64) -> PostDepth {
    let burial = burial_depth_in(spec.height_ft);
    let (standard, special_order) = standard_post_length_ft(spec.height_ft, burial);
    let post_section = spec.material.post_section();
    let bag_size = spec.concrete.bag_size;
    let per_post = bags_per_post(post_section, bag_size);

    let total_bags = if spec.concrete.enabled {
        ceil_count(post_count as f64 * per_post)
    } else {
        0
    };

    PostDepth {
        burial_depth_in: burial,
        required_length_ft: required_length_ft(spec.height_ft, burial),
        standard_post_length_ft: standard,
        special_order,
        post_section,
        bag_size,
        bags_per_post: per_post,
        post_count,
        total_bags,
    }
}
