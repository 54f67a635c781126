mod contact_repository_test;
