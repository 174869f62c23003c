mod pack_contract;
