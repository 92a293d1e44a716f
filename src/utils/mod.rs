pub(crate) mod maths_utils;
