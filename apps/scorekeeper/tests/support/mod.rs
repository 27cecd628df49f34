pub mod mock_authority;

mod test_init;
