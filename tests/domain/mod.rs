mod description_variant_test;
mod image_identity_test;
