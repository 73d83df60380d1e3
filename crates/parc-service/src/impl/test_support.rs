//! In-memory repository fakes shared by the service tests.

use async_trait::async_trait;
use parc_core::{
    Company, CompanyId, CompanyRef, Computer, ComputerId, FilterOperator, NewComputer, Page,
    PageFilter, PageRequest, ParcResult, User, UserId,
};
use parc_repository::{CompanyRepository, ComputerRepository, StoreTransaction, UserRepository};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// In-memory computer repository.
///
/// Mirrors the MySQL implementation's join behavior: the denormalized
/// company name on created computers comes from the seeded company list.
pub struct InMemoryComputerRepository {
    state: Mutex<ComputerState>,
    company_names: BTreeMap<i64, String>,
}

struct ComputerState {
    computers: BTreeMap<i64, Computer>,
    next_id: i64,
}

impl InMemoryComputerRepository {
    pub fn new() -> Self {
        Self::with_companies(&[])
    }

    pub fn with_companies(companies: &[Company]) -> Self {
        Self {
            state: Mutex::new(ComputerState {
                computers: BTreeMap::new(),
                next_id: 1,
            }),
            company_names: companies
                .iter()
                .map(|c| (c.id.into_inner(), c.name.clone()))
                .collect(),
        }
    }

    fn matches(filter: &PageFilter, computer: &Computer) -> bool {
        let name_match = filter
            .name_contains
            .as_deref()
            .map(|needle| computer.name.contains(needle));
        let company_match = filter.company_contains.as_deref().map(|needle| {
            computer
                .company
                .as_ref()
                .is_some_and(|c| c.name.contains(needle))
        });

        match (name_match, company_match) {
            (None, None) => true,
            (Some(m), None) | (None, Some(m)) => m,
            (Some(a), Some(b)) => match filter.operator {
                FilterOperator::And => a && b,
                FilterOperator::Or => a || b,
            },
        }
    }
}

#[async_trait]
impl ComputerRepository for InMemoryComputerRepository {
    async fn create(&self, draft: &NewComputer) -> ParcResult<Computer> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;

        let computer = Computer {
            id: ComputerId::new(id),
            name: draft.name.clone(),
            introduced: draft.introduced,
            discontinued: draft.discontinued,
            company: draft.company_id.and_then(|cid| {
                self.company_names
                    .get(&cid.into_inner())
                    .map(|name| CompanyRef::new(cid, name.clone()))
            }),
        };
        state.computers.insert(id, computer.clone());
        Ok(computer)
    }

    async fn update(&self, computer: &Computer) -> ParcResult<Computer> {
        let mut state = self.state.lock().unwrap();
        state
            .computers
            .insert(computer.id.into_inner(), computer.clone());
        Ok(computer.clone())
    }

    async fn delete(&self, id: ComputerId) -> ParcResult<bool> {
        let mut state = self.state.lock().unwrap();
        Ok(state.computers.remove(&id.into_inner()).is_some())
    }

    async fn delete_by_company(
        &self,
        company_id: CompanyId,
        _tx: &mut StoreTransaction<'_>,
    ) -> ParcResult<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.computers.len();
        state
            .computers
            .retain(|_, c| c.company_id() != Some(company_id));
        Ok(state.computers.len() < before)
    }

    async fn find_by_id(&self, id: ComputerId) -> ParcResult<Option<Computer>> {
        let state = self.state.lock().unwrap();
        Ok(state.computers.get(&id.into_inner()).cloned())
    }

    async fn find_by_name(&self, name: &str) -> ParcResult<Option<Computer>> {
        let state = self.state.lock().unwrap();
        Ok(state.computers.values().find(|c| c.name == name).cloned())
    }

    async fn find_page(&self, filter: &PageFilter) -> ParcResult<Page<Computer>> {
        let state = self.state.lock().unwrap();
        let matches: Vec<Computer> = state
            .computers
            .values()
            .filter(|c| Self::matches(filter, c))
            .cloned()
            .collect();

        let total = matches.len() as u64;
        let start = filter.page.offset();
        let end = std::cmp::min(start + filter.page.limit(), matches.len());
        let items = if start < matches.len() {
            matches[start..end].to_vec()
        } else {
            vec![]
        };

        Ok(Page::new(items, filter.page.page, filter.page.size, total))
    }

    async fn count(&self, filter: &PageFilter) -> ParcResult<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .computers
            .values()
            .filter(|c| Self::matches(filter, c))
            .count() as u64)
    }
}

/// In-memory company repository.
pub struct InMemoryCompanyRepository {
    state: Mutex<CompanyState>,
}

struct CompanyState {
    companies: BTreeMap<i64, Company>,
    next_id: i64,
}

impl InMemoryCompanyRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CompanyState {
                companies: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    pub fn with_companies(companies: Vec<Company>) -> Self {
        let repo = Self::new();
        {
            let mut state = repo.state.lock().unwrap();
            for company in companies {
                let id = company.id.into_inner();
                state.next_id = state.next_id.max(id + 1);
                state.companies.insert(id, company);
            }
        }
        repo
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn find_by_id(&self, id: CompanyId) -> ParcResult<Option<Company>> {
        let state = self.state.lock().unwrap();
        Ok(state.companies.get(&id.into_inner()).cloned())
    }

    async fn find_all(&self) -> ParcResult<Vec<Company>> {
        let state = self.state.lock().unwrap();
        Ok(state.companies.values().cloned().collect())
    }

    async fn find_page(&self, page: PageRequest) -> ParcResult<Page<Company>> {
        let state = self.state.lock().unwrap();
        let all: Vec<Company> = state.companies.values().cloned().collect();
        let total = all.len() as u64;
        let start = page.offset();
        let end = std::cmp::min(start + page.limit(), all.len());
        let items = if start < all.len() {
            all[start..end].to_vec()
        } else {
            vec![]
        };
        Ok(Page::new(items, page.page, page.size, total))
    }

    async fn create(&self, name: &str) -> ParcResult<Company> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        let company = Company::new(CompanyId::new(id), name);
        state.companies.insert(id, company.clone());
        Ok(company)
    }

    async fn delete(&self, id: CompanyId) -> ParcResult<bool> {
        let mut state = self.state.lock().unwrap();
        Ok(state.companies.remove(&id.into_inner()).is_some())
    }

    async fn count(&self) -> ParcResult<u64> {
        let state = self.state.lock().unwrap();
        Ok(state.companies.len() as u64)
    }
}

/// In-memory user repository.
pub struct InMemoryUserRepository {
    users: Mutex<BTreeMap<i64, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.users.lock().unwrap();
            for user in users {
                map.insert(user.id.into_inner(), user);
            }
        }
        repo
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> ParcResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id.into_inner()).cloned())
    }

    async fn find_by_username(&self, username: &str) -> ParcResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_page(&self, page: PageRequest) -> ParcResult<Page<User>> {
        let users: Vec<User> = self.users.lock().unwrap().values().cloned().collect();
        let total = users.len() as u64;
        let start = page.offset();
        let end = std::cmp::min(start + page.limit(), users.len());
        let items = if start < users.len() {
            users[start..end].to_vec()
        } else {
            vec![]
        };
        Ok(Page::new(items, page.page, page.size, total))
    }
}
