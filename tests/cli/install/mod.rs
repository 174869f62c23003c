mod arguments_contract;
mod failure_contract;
