mod contact_list_test;
